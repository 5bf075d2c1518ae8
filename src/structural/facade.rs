//! Facade: one convenient entry point in front of several fiddly
//! subsystems. The subsystems stay independently usable; the facade just
//! encodes the common choreography.

/// Pulls the raw streams out of a container file.
pub struct Demuxer;

impl Demuxer {
    pub fn split(&self, path: &str) -> (String, String) {
        (
            format!("{path}#video(h264)"),
            format!("{path}#audio(aac)"),
        )
    }
}

/// Turns an encoded stream into frames/samples.
pub struct Decoder;

impl Decoder {
    pub fn decode(&self, stream: &str) -> String {
        format!("decoded<{stream}>")
    }
}

/// Balances and merges decoded streams back together.
pub struct Mixer;

impl Mixer {
    pub fn mix(&self, video: &str, audio: &str, target: &str) -> String {
        format!("{target}[{video} + {audio}]")
    }
}

/// The one call most users actually want.
pub struct MediaFacade {
    demuxer: Demuxer,
    decoder: Decoder,
    mixer: Mixer,
}

impl MediaFacade {
    pub fn new() -> Self {
        Self {
            demuxer: Demuxer,
            decoder: Decoder,
            mixer: Mixer,
        }
    }

    /// Demux, decode both streams, remux for the target format.
    pub fn convert(&self, path: &str, target: &str) -> String {
        let (video, audio) = self.demuxer.split(path);
        let video = self.decoder.decode(&video);
        let audio = self.decoder.decode(&audio);
        self.mixer.mix(&video, &audio, target)
    }
}

impl Default for MediaFacade {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo() {
    let facade = MediaFacade::new();
    println!("one call hides the demux/decode/mix choreography:");
    println!("  {}", facade.convert("holiday.mp4", "webm"));

    println!("the subsystems are still there for power users:");
    let (video, _) = Demuxer.split("holiday.mp4");
    println!("  demux only: {video}");
}
