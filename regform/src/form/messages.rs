// username
pub const USERNAME_REQUIRED: &str = "username is required";
pub const USERNAME_MIN: &str = "username must be at least 3 characters";
pub const USERNAME_MAX: &str = "username cannot exceed 20 characters";
// favLanguage
pub const FAV_LANGUAGE_REQUIRED: &str = "favLanguage is required";
pub const FAV_LANGUAGE_OPTIONS: &str =
    "favLanguage must be either javascript or rust";
// favFood
pub const FAV_FOOD_REQUIRED: &str = "a favorite food must be selected";
pub const FAV_FOOD_OPTIONS: &str =
    "a favorite food must be either broccoli, spaghetti or pizza";
// agreement
pub const AGREEMENT_REQUIRED: &str = "agreement is required";
pub const AGREEMENT_OPTIONS: &str = "agreement must be accepted";
