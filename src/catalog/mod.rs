mod composer;
mod load;
mod recording;
mod snapshot;
mod work;

pub use composer::{CatalogSystem, Category, Composer, ComposerCatalogue, ComposerEntry, Period};
pub use load::{
    load_catalog, CatalogError, LoadedCatalog, Problem as LoadCatalogProblem,
    RECORDINGS_FILE_NAME,
};
pub use recording::{
    AudioQuality, CriticalReception, Performers, Recording, RecordingInfo, RecordingView,
    RecordingsDocument, Review, StreamingLink, VARIOUS_ARTISTS,
};
pub use snapshot::Snapshot;
pub use work::Work;
