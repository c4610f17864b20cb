pub mod enrichment;

pub use enrichment::EnrichmentService;
