pub mod additional_info;
pub mod assemble;
pub mod html;
pub mod locate;
pub mod normalize;
pub mod pipeline;
pub mod row;
pub mod stay;
pub mod visa_type;

pub use assemble::{additional_info_links, assemble_result};
pub use html::{parse_tables, HtmlTable};
pub use locate::{find_requirements_table, resolve_columns, ColumnMap};
pub use normalize::{clean_text, normalize_for_compare, normalize_for_display};
pub use pipeline::{extract_requirements, RowExtract};
pub use row::{match_destination_row, MatchedRow};
pub use stay::{parse_stay, StayAssessment};
pub use visa_type::{classify_visa, VisaClassification};
