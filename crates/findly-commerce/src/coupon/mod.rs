//! Coupon module.
//!
//! Contains the coupon model, the per-listing pricing result, and the
//! best-coupon selection.

mod coupon;
pub mod pricer;
mod result;

pub use coupon::{Coupon, CouponKind, RawCoupon};
pub use pricer::{apply_coupon, best_of, select_best_coupon};
pub use result::PricingResult;
