//! SSML helpers for audio-only clarity

/// The link page URL, paced for speech
pub const SPOKEN_LINK_URL: &str =
    "Plex dot TV <break strength='medium'/> slash <break strength='medium'/> link. ";

/// Render a PIN code so it survives an audio-only channel: each character is
/// spelled out individually, separated by a strong pause. Codes are
/// lower-cased first so the rendering is case-insensitive.
pub fn spoken_pin(code: &str) -> String {
    code.to_lowercase()
        .chars()
        .map(|c| format!("<say-as interpret-as='spell-out'>{}</say-as>", c))
        .collect::<Vec<_>>()
        .join("<break strength='strong'/>")
}

/// Join a list for speech: comma-separated with a final conjunction (Oxford
/// comma for three or more). With `hyphenate`, spaces inside each item become
/// hyphens so multi-word titles are read as one unit.
pub fn natural_list(items: &[String], conjunction: &str, hyphenate: bool) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|item| {
            if hyphenate {
                item.replace(' ', "-")
            } else {
                item.clone()
            }
        })
        .collect();

    match rendered.len() {
        0 => String::new(),
        1 => rendered[0].clone(),
        2 => format!("{} {} {}", rendered[0], conjunction, rendered[1]),
        n => {
            let head = rendered[..n - 1].join(", ");
            format!("{}, {} {}", head, conjunction, rendered[n - 1])
        }
    }
}
