pub mod graph;
pub mod report;
pub mod route;
pub mod run;
pub mod traffic;

#[cfg(test)]
mod test;
