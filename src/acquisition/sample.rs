//! Built-in placeholder songs for demo runs and tests.

use async_trait::async_trait;

use crate::acquisition::{AcquisitionQuery, LyricsSource};
use crate::error::Result;
use crate::types::LyricRecord;

/// `(title, artist, lyrics)` rows served by [`SampleSource`].
const SAMPLE_SONGS: &[(&str, &str, &str)] = &[
    ("Pagi Cerah", "Senja Kala", "Sunshine in the morning,\nI am so happy with you,\nlove is all I need"),
    ("Terima Kasih Cinta", "Rumah Kaca", "Thank you for the love, you make me smile,\na wonderful life together"),
    ("Hari Baik", "Senja Kala", "Hari ini hari baik, kita tertawa bersama,\nfeeling free and glad"),
    ("Pesta Kecil", "Layang Biru", "Dance all night, such a beautiful night,\njoy in every heart"),
    ("Luka Lama", "Rumah Kaca", "Tears fall, my heart is broken,\nI cry alone tonight"),
    ("Hujan di Kota", "Layang Biru", "Pain and sorrow, the rain keeps falling,\nso lonely and lost"),
    ("Pergi", "Senja Kala", "You lied to me, I hate the lies,\ngoodbye my heartbreak"),
    ("Kecewa", "Nadia Rahma", "Aku kecewa, hatiku hancur,\nso sad and tired of the pain"),
    ("Kereta Malam", "Layang Biru", "Kereta malam berjalan pelan,\nmelewati kota yang sunyi"),
    ("Jendela", "Nadia Rahma", "Di balik jendela aku menunggu,\nhujan turun perlahan"),
    ("Rindu", "Rumah Kaca", "Aku rindu padamu,\nsetiap malam aku menunggu kabarmu"),
    ("Jalan Pulang", "Nadia Rahma", "Jalan pulang terasa panjang,\nlangkahku pelan menuju rumah"),
];

/// Fixed in-memory songs; never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl SampleSource {
    /// Every sample song, unfiltered.
    pub fn records() -> Result<Vec<LyricRecord>> {
        SAMPLE_SONGS
            .iter()
            .map(|&(title, artist, lyrics)| LyricRecord::new(title, artist, lyrics))
            .collect()
    }
}

#[async_trait]
impl LyricsSource for SampleSource {
    async fn fetch(&self, query: &AcquisitionQuery) -> Result<Vec<LyricRecord>> {
        Ok(query.apply(Self::records()?))
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}
