//! Iterator: a hand-rolled `Iterator` impl over a domain collection, which
//! then gets the whole combinator ecosystem for free.

/// A track in a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub seconds: u32,
}

#[derive(Debug, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, title: impl Into<String>, seconds: u32) -> &mut Self {
        self.tracks.push(Track {
            title: title.into(),
            seconds,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate once through the playlist from the top.
    pub fn iter(&self) -> PlaylistIter<'_> {
        PlaylistIter {
            tracks: &self.tracks,
            position: 0,
        }
    }
}

/// External iterator state lives here, not in the playlist, so several
/// listeners can walk the same playlist independently.
pub struct PlaylistIter<'a> {
    tracks: &'a [Track],
    position: usize,
}

impl<'a> Iterator for PlaylistIter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<Self::Item> {
        let track = self.tracks.get(self.position)?;
        self.position += 1;
        Some(track)
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = PlaylistIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn sample_playlist() -> Playlist {
    let mut playlist = Playlist::new();
    playlist
        .add("Intro", 52)
        .add("Main Theme", 214)
        .add("Interlude", 95)
        .add("Finale", 301);
    playlist
}

pub fn demo() {
    let playlist = sample_playlist();

    println!("walking the playlist with a custom iterator:");
    for track in &playlist {
        println!("  {} ({}s)", track.title, track.seconds);
    }

    // One impl of next(), all the combinators.
    let total: u32 = playlist.iter().map(|t| t.seconds).sum();
    let longest = playlist.iter().max_by_key(|t| t.seconds);
    println!("total runtime: {total}s");
    if let Some(track) = longest {
        println!("longest track: {}", track.title);
    }
    let short: Vec<_> = playlist
        .iter()
        .filter(|t| t.seconds < 100)
        .map(|t| t.title.as_str())
        .collect();
    println!("under 100s: {short:?}");
}
