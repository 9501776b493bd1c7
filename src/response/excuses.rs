// Start of file: /src/response/excuses.rs

use rand::seq::SliceRandom;

const EXCUSES: &[&str] = &[
    "It works on my machine.",
    "That's weird, it worked yesterday.",
    "Somebody must have changed my code.",
    "It must be a hardware problem.",
    "The third-party API is not responding.",
    "It's a caching issue.",
    "I haven't touched that module in weeks.",
    "That's already fixed, it just hasn't been deployed.",
    "The requirements weren't clear.",
    "It's probably a timezone thing.",
    "You must have the wrong version.",
    "That was only supposed to be a temporary fix.",
    "It's not a bug, it's a feature.",
    "The compiler must be broken.",
    "I was told to stop working on that.",
    "Nobody asked me how long it would actually take.",
];

pub fn random_excuse() -> &'static str {
    EXCUSES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(EXCUSES[0])
}

// End of file: /src/response/excuses.rs
