//! Block renderers
//!
//! Each block draws one fixed region of the template through the
//! [`PageCursor`](crate::PageCursor). Offsets are constants, see
//! [`crate::constants`].

mod footer;
mod header;
mod payment;
mod recipients;
mod summary;

pub use footer::FooterStamp;
pub use header::{render_amount_due, render_banner, render_company, render_logo};
pub use payment::render_payment_footer;
pub use recipients::{recipient_lines, render_recipients};
pub use summary::{
    render_summary, shipping_value, summary_block_height, summary_rows, RowStyle, SummaryRow,
};
