//! Pricing core for Findly product listings.
//!
//! This crate turns the loosely formatted data of a search API into exact
//! prices:
//!
//! - **Money**: integer-cent amounts with a currency
//! - **Price**: lenient parsing of upstream price strings
//! - **Coupon**: coupon validation, best-coupon selection, discounted price
//!
//! # Example
//!
//! ```
//! use findly_commerce::prelude::*;
//!
//! let price = parse_price("$100.00", Currency::USD);
//! let coupons = RawCoupon::parse_list(
//!     r#"[{"code":"P20","type":"percent","discount":20},
//!         {"code":"F15","type":"fixed","discount":15}]"#,
//! )
//! .unwrap();
//!
//! let result = select_best_coupon(price, &coupons);
//! assert_eq!(result.chosen_coupon.unwrap().code, "P20");
//! assert_eq!(result.final_price.display(), "$80.00");
//! ```

pub mod coupon;
pub mod error;
pub mod money;
pub mod price;

pub use error::{CommerceError, CouponError};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, CouponError};
    pub use crate::money::{Currency, Money};
    pub use crate::price::{parse_amount, parse_price, RawPrice};

    pub use crate::coupon::{
        apply_coupon, best_of, select_best_coupon, Coupon, CouponKind, PricingResult, RawCoupon,
    };
}
