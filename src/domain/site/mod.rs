//! Site domain module.
//!
//! Queries over a site's membership configuration: which products exist,
//! who may sign up, and which price a page query refers to.
//!
//! # Module Structure
//!
//! - `settings` - Site configuration and product queries
//! - `product` - Product tiers and their price references
//! - `page_query` - `"<productId>/<cadence>"` parsing and resolution

mod page_query;
mod product;
mod settings;

pub use page_query::{price_id_from_page_query, Cadence, PageQuery};
pub use product::{Product, ProductPrice, ProductType};
pub use settings::{free_product, has_multiple_products, is_invite_only_site, SignupAccess, Site};
