pub mod count;
pub mod exists;
pub mod semver;
pub mod string;
