pub mod page_controller;

#[cfg(test)]
mod fakes;
