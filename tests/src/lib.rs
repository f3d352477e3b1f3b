#![cfg(test)]

mod sweep;
