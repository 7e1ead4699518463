pub mod downloader;
pub mod parser;
pub mod record;

pub use downloader::{collect_closure, DownloadOrchestrator, FetchReport, FetchedArchive};
pub use parser::PackageRecordParser;
pub use record::PackageRecord;
