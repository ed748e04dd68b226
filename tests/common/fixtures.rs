//! Test fixture creation for the catalogue data directory
//!
//! Two composers (Bach with 5 works, Mozart with 3) and 6 recordings.

#![allow(dead_code)]

use anyhow::Result;
use catalogue_server::catalog::RECORDINGS_FILE_NAME;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bach_catalogue() -> Value {
    json!({
        "composer": {
            "id": "bach",
            "fullName": "Johann Sebastian Bach",
            "firstName": "Johann Sebastian",
            "lastName": "Bach",
            "birthDate": "1685-03-31",
            "birthPlace": "Eisenach",
            "deathDate": "1750-07-28",
            "deathPlace": "Leipzig",
            "nationality": "German",
            "period": "Baroque",
            "catalogPrefix": "BWV",
            "totalWorks": 1128
        },
        "catalogSystem": {
            "name": "Bach-Werke-Verzeichnis",
            "abbreviation": "BWV",
            "author": "Wolfgang Schmieder",
            "publicationYear": 1950
        },
        "categories": {
            "cantatas": { "name": "Cantatas", "bwvRange": "1-224" },
            "masses": { "name": "Masses", "bwvRange": "232-242" },
            "keyboard": { "name": "Keyboard Works", "bwvRange": "772-994" }
        },
        "works": [
            {
                "bwv": "BWV 1",
                "title": "Wie schön leuchtet der Morgenstern",
                "category": "cantatas",
                "key": "F major",
                "yearComposed": 1725,
                "instrumentation": "SATB, horns, oboes da caccia, strings",
                "movements": 6,
                "duration": 24
            },
            {
                "bwv": "BWV 140",
                "title": "Wachet auf, ruft uns die Stimme",
                "category": "cantatas",
                "key": "E-flat major",
                "yearComposed": 1731,
                "instrumentation": "SATB, horn, oboes, violino piccolo, strings"
            },
            {
                "bwv": "BWV 232",
                "title": "Mass in B minor",
                "germanTitle": "Messe in h-Moll",
                "category": "masses",
                "key": "B minor",
                "yearComposed": 1749,
                "instrumentation": "SSATB soloists, choir, orchestra",
                "movements": 27,
                "duration": 108,
                "movementList": ["Kyrie", "Gloria", "Credo", "Sanctus", "Agnus Dei"]
            },
            {
                "bwv": "BWV 988",
                "title": "Goldberg Variations",
                "category": "keyboard",
                "key": "G major",
                "yearComposed": 1741,
                "instrumentation": "Harpsichord",
                "movements": 32
            },
            {
                "bwv": "BWV 1080",
                "title": "The Art of Fugue",
                "germanTitle": "Die Kunst der Fuge",
                "category": "keyboard",
                "key": "D minor"
            }
        ]
    })
}

fn mozart_catalogue() -> Value {
    json!({
        "composer": {
            "id": "mozart",
            "fullName": "Wolfgang Amadeus Mozart",
            "birthDate": "1756-01-27",
            "deathDate": "1791-12-05",
            "nationality": "Austrian",
            "period": "Classical",
            "catalogPrefix": "K."
        },
        "catalogSystem": { "name": "Köchel-Verzeichnis", "abbreviation": "K" },
        "categories": {
            "serenades": { "name": "Serenades" },
            "sacred": { "name": "Sacred Works" },
            "symphonies": { "name": "Symphonies" }
        },
        "works": [
            {
                "catalogId": "K. 525",
                "title": "Eine kleine Nachtmusik",
                "category": "serenades",
                "key": "G major",
                "yearComposed": 1787,
                "instrumentation": "String ensemble"
            },
            {
                "catalogId": "K. 626",
                "title": "Requiem in D minor",
                "category": "sacred",
                "key": "D minor",
                "yearComposed": 1791,
                "instrumentation": "Soloists, choir, orchestra"
            },
            {
                "catalogId": "K. 551",
                "title": "Symphony No. 41 \"Jupiter\"",
                "category": "symphonies",
                "key": "C major",
                "yearComposed": 1788,
                "instrumentation": "Orchestra"
            }
        ]
    })
}

#[allow(clippy::too_many_arguments)]
fn recording(
    id: &str,
    work_id: &str,
    composer: &str,
    work_title: &str,
    performers: Value,
    year: i32,
    rating: Option<f64>,
    platforms: &[&str],
) -> Value {
    let links: Vec<Value> = platforms
        .iter()
        .map(|p| json!({ "platform": p, "url": format!("https://example.com/{}/{}", p, id) }))
        .collect();
    let mut value = json!({
        "id": id,
        "workId": work_id,
        "composer": composer,
        "workTitle": work_title,
        "performers": performers,
        "recordingInfo": {
            "year": year,
            "label": "Test Label",
            "format": ["CD", "Digital"],
            "duration": 60
        },
        "audioQuality": { "format": "DDD" },
        "streamingLinks": links
    });
    if let Some(rating) = rating {
        value["criticalReception"] = json!({
            "rating": rating,
            "reviews": [{ "source": "Gramophone", "rating": "5/5", "excerpt": "Essential." }]
        });
    }
    value
}

pub fn recordings_document() -> Value {
    json!({
        "recordings": [
            recording("rec_001", "BWV 988", "Bach", "Goldberg Variations",
                json!({ "soloist": "Glenn Gould" }), 1981, Some(4.9), &["Spotify", "Apple Music"]),
            recording("rec_002", "BWV 988", "Bach", "Goldberg Variations",
                json!({ "soloist": "Glenn Gould" }), 1955, Some(4.7), &["Spotify"]),
            recording("rec_003", "BWV 232", "Bach", "Mass in B minor",
                json!({
                    "conductor": "John Eliot Gardiner",
                    "ensemble": "Monteverdi Choir",
                    "soloists": ["Nancy Argenta"]
                }), 1985, Some(4.8), &["Apple Music"]),
            recording("rec_004", "BWV 1", "Bach", "Wie schön leuchtet der Morgenstern",
                json!({ "conductor": "Ton Koopman", "ensemble": "Amsterdam Baroque Orchestra" }),
                1995, Some(4.5), &["YouTube"]),
            recording("rec_005", "K. 626", "Mozart", "Requiem in D minor",
                json!({ "conductor": "Herbert von Karajan", "ensemble": "Berlin Philharmonic" }),
                1975, Some(4.6), &["Spotify"]),
            recording("rec_006", "K. 525", "Mozart", "Eine kleine Nachtmusik",
                json!({ "ensemble": "Academy of St Martin in the Fields" }), 2015, None, &["Spotify"])
        ],
        "platforms": {
            "spotify": { "name": "Spotify" },
            "appleMusic": { "name": "Apple Music" },
            "youtube": { "name": "YouTube" }
        }
    })
}

pub fn write_recordings(dir: &Path, document: &Value) -> Result<()> {
    fs::write(dir.join(RECORDINGS_FILE_NAME), serde_json::to_string_pretty(document)?)?;
    Ok(())
}

/// Creates a temporary data directory with the full fixture catalogue.
pub fn create_test_data_dir() -> Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("bach-bwv-catalogue.json"),
        serde_json::to_string_pretty(&bach_catalogue())?,
    )?;
    fs::write(
        dir.path().join("mozart-k-catalogue.json"),
        serde_json::to_string_pretty(&mozart_catalogue())?,
    )?;
    write_recordings(dir.path(), &recordings_document())?;
    fs::write(dir.path().join("README.txt"), "not a catalogue")?;
    Ok(dir)
}
