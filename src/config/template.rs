/// Commented configuration written by `sagx init`
pub const DEFAULT_CONFIG: &str = r#"# SAGX Configuration
# ==================
#
# Every key is optional; removed keys fall back to the values shown here.

# ============================================================================
# ASSISTANT - How spoken requests are interpreted
# ============================================================================
#
#   default_location - Place used for "what's the weather" without "in <place>"
#   answer_max_chars - Longer web answers are cut to their first sentence

[assistant]
default_location = "Mumbai"
answer_max_chars = 120

# ============================================================================
# LOOKUP - Web services behind weather, jokes and general questions
# ============================================================================
#
# The weather API key can also be set with SAGX_WEATHER_API_KEY.

[lookup]
weather_api_key = ""
weather_url = "https://api.openweathermap.org/data/2.5/weather"
joke_url = "https://v2.jokeapi.dev"
# "Any", or a comma separated list such as "Programming,Misc,Pun"
joke_categories = "Any"
answer_url = "https://api.duckduckgo.com/"
search_url = "https://www.google.com/search"
timeout_secs = 10

# ============================================================================
# OUTPUT - Speech and browser
# ============================================================================

[speech]
enabled = true
# Text-to-speech binary; the text is appended as the last argument.
# Leave unset for the platform default ("say" on macOS, "espeak" elsewhere).
# command = "espeak"
args = []

[browser]
enabled = true
# Leave unset for the platform opener (open / xdg-open / start)
# command = "firefox"

# ============================================================================
# SITES - Extra targets for "open <name>", checked after the built-in ones
# (google, youtube, instagram, github, twitter, calculator)
# ============================================================================
#
# [[sites]]
# name = "wikipedia"
# url = "https://www.wikipedia.org"
# message = "Opening Wikipedia."
"#;
