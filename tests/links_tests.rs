use yt_summarizer::core::models::VideoReference;
use yt_summarizer::utils::links::{extract_video_id, is_youtube_url};

const VIDEO_ID: &str = "dQw4w9WgXcQ";

/// Small deterministic generator so failures reproduce exactly.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next() as usize) % items.len()]
    }

    fn string_from(&mut self, alphabet: &[char], max_len: usize) -> String {
        let len = (self.next() as usize) % (max_len + 1);
        (0..len)
            .map(|_| alphabet[(self.next() as usize) % alphabet.len()])
            .collect()
    }
}

#[test]
fn test_watch_urls_with_every_scheme_and_prefix() {
    for scheme in ["", "http://", "https://"] {
        for www in ["", "www."] {
            let url = format!("{scheme}{www}youtube.com/watch?v={VIDEO_ID}");
            assert!(is_youtube_url(&url), "should accept {url}");
            assert_eq!(extract_video_id(&url), Some(VIDEO_ID));
        }
    }
}

#[test]
fn test_generated_valid_links_are_accepted() {
    let mut rng = Lcg(7);
    let id_alphabet: Vec<char> = ('a'..='z')
        .chain('A'..='Z')
        .chain('0'..='9')
        .chain(['-', '_'])
        .collect();
    let suffixes = ["", "&t=42s", "&list=PL123&index=2", "#comments", " please summarize"];

    for _ in 0..500 {
        let id: String = (0..11)
            .map(|_| id_alphabet[(rng.next() as usize) % id_alphabet.len()])
            .collect();
        let url = format!(
            "{}{}youtube.com/watch?v={}{}",
            rng.pick(&["", "http://", "https://"]),
            rng.pick(&["", "www."]),
            id,
            rng.pick(&suffixes)
        );
        assert!(is_youtube_url(&url), "should accept {url}");
        assert_eq!(extract_video_id(&url), Some(id.as_str()));
    }
}

#[test]
fn test_generated_strings_without_youtube_host_are_rejected() {
    let mut rng = Lcg(42);
    // No 'y' means no supported host can ever appear.
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxz0123456789:/?=&%.-_ "
        .chars()
        .collect();

    for _ in 0..2000 {
        let candidate = rng.string_from(&alphabet, 80);
        assert!(!is_youtube_url(&candidate), "should reject {candidate:?}");
    }
}

#[test]
fn test_other_supported_shapes() {
    let accepted = [
        format!("https://youtu.be/{VIDEO_ID}"),
        format!("https://www.youtube.com/embed/{VIDEO_ID}"),
        format!("https://www.youtube.com/v/{VIDEO_ID}"),
        format!("https://www.youtube-nocookie.com/embed/{VIDEO_ID}"),
        format!("youtube.be/{VIDEO_ID}"),
        format!("https://www.youtube.com/attribution_link?u=/watch?v={VIDEO_ID}"),
    ];
    for url in &accepted {
        assert!(is_youtube_url(url), "should accept {url}");
    }
}

#[test]
fn test_unsupported_links_are_rejected() {
    let rejected = [
        "",
        "check out this site: example.com",
        "https://vimeo.com/123456789",
        "https://www.youtube.org/watch?v=dQw4w9WgXcQ",
        "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
        "ftp://youtube.com/watch?v=dQw4w9WgXcQ",
        "https://www.youtube.com",
        "https://www.youtube.com/",
    ];
    for url in rejected {
        assert!(!is_youtube_url(url), "should reject {url:?}");
    }
}

#[test]
fn test_short_identifier_followed_by_disallowed_character_is_rejected() {
    for stop in ['&', '=', '%', '?'] {
        let url = format!("youtube.com/watch?v=abc123{stop}feature=share");
        assert!(!is_youtube_url(&url), "should reject {url}");
    }
    assert!(!is_youtube_url("https://youtu.be/short"));
}

#[test]
fn test_longer_identifier_matches_on_its_first_eleven_characters() {
    // Matching is anchored at the start only, so extra characters are ignored.
    let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQXYZ&feature=share";
    assert!(is_youtube_url(url));
    assert_eq!(extract_video_id(url), Some(VIDEO_ID));
}

#[test]
fn test_video_reference_keeps_original_url() {
    let url = "youtube.com/watch?v=dQw4w9WgXcQ&t=1";
    let video = VideoReference::parse(url).unwrap();
    assert_eq!(video.url(), url);
    assert_eq!(video.video_id(), VIDEO_ID);

    assert!(VideoReference::parse("example.com").is_none());
}
