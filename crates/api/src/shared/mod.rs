pub mod roster;
pub mod route_group;
#[cfg(test)]
pub mod testing;
pub mod usecase;
