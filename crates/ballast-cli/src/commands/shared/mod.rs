pub mod limit;
pub mod options;

#[cfg(test)]
pub mod fixtures;
