//! Fixed texts spoken by the handlers

pub const WEATHER_FAILED: &str = "I couldn't fetch the weather information. Try again later.";

pub const NO_JOKE: &str = "Sorry, I couldn't find a good joke right now.";

pub const JOKE_FAILED: &str = "Oops, I can't tell a joke right now.";

pub const TASK_NOT_UNDERSTOOD: &str = "Sorry, I couldn't understand the task to add.";

pub const UNKNOWN_SITE: &str =
    "I am not sure how to open that. I will improve myself but currently searching it on Google for you.";

pub const NO_ANSWER: &str = "I couldn't find the answer, but I am searching it on Google for you.";

pub const ANSWER_FAILED: &str = "Sorry, I am having trouble responding right now.";

pub const LISTENING: &str = "Listening...";
