pub mod config;
pub mod errors;
pub mod store;
pub mod utils;

pub const MOVIE_ID_PARAM: &str = "movieId";
pub const AWARD_BODY_PARAM: &str = "awardBody";

pub const MISSING_KEY_ERROR: &str = "Missing movieId or awardBody";
pub const NO_AWARDS_FOUND_ERROR: &str = "No awards found for the given criteria";
