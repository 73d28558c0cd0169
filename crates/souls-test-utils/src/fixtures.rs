use serde_json::json;
use souls_memory::{ContentPart, ImageUrl, InputMemory, NewMemory};

/// The canonical `{"role": "user", "content": "hello", "region": "us"}` input.
pub fn region_input() -> InputMemory {
    match json!({ "role": "user", "content": "hello", "region": "us" }) {
        serde_json::Value::Object(map) => InputMemory::from(map),
        _ => unreachable!("object literal"),
    }
}

/// User message with one text part followed by one detailed image part.
pub fn multipart_memory() -> NewMemory {
    NewMemory::user(vec![
        ContentPart::text("What is in this picture?"),
        ContentPart::image(ImageUrl::new("https://example.com/board.png").with_detail("high")),
    ])
}

/// Short classroom exchange with one thought tagged by region.
pub fn sample_conversation() -> Vec<NewMemory> {
    vec![
        NewMemory::system("You are Professor Code, a cheerful computer science teacher."),
        NewMemory::user("How does a hash map work?"),
        NewMemory::assistant("Professor Code thought: start with buckets.")
            .with_region("internal_monologue"),
        NewMemory::assistant("Picture a row of labelled lockers!"),
    ]
}
