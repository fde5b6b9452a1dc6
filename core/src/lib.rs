//! Aggregation core for the Stocklens inventory dashboard
//!
//! Turns raw product, purchase, and sale collections fetched from the
//! backend into the derived rows and summaries the dashboard renders:
//! due tables, monthly profit reports, stock movement, and the
//! account/dashboard roll-ups. Every function here is pure and
//! synchronous; the clock is always passed in by the caller.

pub mod account;
pub mod diagnostics;
pub mod due;
pub mod error;
pub mod models;
pub mod normalize;
pub mod profit;
pub mod status;
pub mod stock;
pub mod summary;
pub mod types;
pub mod validation;

pub use account::{account_summary, payment_rows, AccountSummary, PaymentRow};
pub use diagnostics::{Diagnostics, Warning};
pub use due::{
    aggregate_party_due, customer_due_rows, supplier_due_rows, top_party_due, DueRow, PartyDue,
};
pub use error::{CoreError, CoreResult};
pub use models::{RawProduct, RawPurchase, RawSale};
pub use normalize::parse_collection;
pub use profit::{
    monthly_profit, MonthlyProfitRow, ProductPriceIndex, ProfitFilter, ProfitReport, ProfitSummary,
};
pub use status::{is_overdue, payment_status, stock_status};
pub use stock::{aggregate_stock, StockAuthority, StockRow};
pub use summary::{dashboard_summary, DailyFlow, DashboardSummary, StockAlert};
pub use types::{
    CollectionResponse, DateRange, DueStatus, EntrySide, StockStatus, LOW_STOCK_LIMIT,
    OVERDUE_AFTER_DAYS, TOP_DUE_LIMIT,
};
