pub mod dictionary;
pub mod record;

pub use dictionary::Dictionary;
pub use record::{
    BlogDocument, ErrorResponse, Gloss, GlossToken, ResultRecord, SummariseRequest,
    SummariseResponse, SummaryRow,
};
