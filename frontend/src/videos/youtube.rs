use url::Url;

/// Extracts the video id from the usual YouTube link shapes:
/// `youtu.be/<id>`, `youtube.com/watch?v=<id>`, `/embed/<id>` and `/v/<id>`.
pub fn extract_video_id(link: &str) -> Option<String> {
    let url = Url::parse(link.trim()).ok()?;

    let id = match url.host_str()? {
        "youtu.be" => url.path_segments()?.next().map(str::to_string),
        "www.youtube.com" | "youtube.com" => {
            let mut segments = url.path_segments()?;
            match segments.next() {
                Some("watch") => url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                Some("embed") | Some("v") => segments.next().map(str::to_string),
                _ => None,
            }
        }
        _ => None,
    };

    id.filter(|id| !id.is_empty())
}
