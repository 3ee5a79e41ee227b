use model::wire::Video;

/// Topics offered when the learner has not picked one yet.
pub const SUGGESTED_TOPICS: &[&str] = &[
    "Motion and Forces",
    "Energy and Work",
    "Waves and Oscillations",
    "Thermodynamics",
    "Electromagnetism",
    "Modern Physics",
];

pub fn recommend(topic: &str) -> Vec<Video> {
    Vec::from([
        Video {
            title: format!("Understanding {topic} - Physics Tutorial"),
            channel: String::from("Physics Explained"),
            duration: String::from("12:34"),
            views: String::from("1.2M"),
            thumbnail: String::from("/api/placeholder/320/180"),
            url: String::from("https://youtube.com/watch?v=example"),
        },
        Video {
            title: format!("{topic} Made Simple - Educational Video"),
            channel: String::from("Science Channel"),
            duration: String::from("8:45"),
            views: String::from("856K"),
            thumbnail: String::from("/api/placeholder/320/180"),
            url: String::from("https://youtube.com/watch?v=example2"),
        },
    ])
}
