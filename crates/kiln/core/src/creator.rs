//! Creators and the template operation (factory method)
//!
//! A [`ProductLine`] holds the business logic that consumes a product and is
//! written once. Each concrete [`Creator`] picks a line and overrides only
//! [`Creator::factory_method`]. The [`TemplateOperation`] that ties the two
//! together has a single blanket implementation, so no creator can replace
//! it: adding a new product means adding one creator and nothing else.

use crate::error::Result;

/// The fixed half of a creator: what happens to a freshly built product
pub trait ProductLine: 'static {
    /// Product capability built by creators of this line
    type Product: ?Sized;

    /// Result of the template operation
    type Output;

    /// Creator-local logic run on every product the line builds
    fn operate(product: &Self::Product) -> Self::Output;
}

/// The overridable half of a creator
pub trait Creator: Send + Sync {
    type Line: ProductLine;

    /// Build one product.
    ///
    /// When no product can be built this must return `ProductUnavailable`
    /// rather than a placeholder.
    fn factory_method(&self) -> Result<Box<<Self::Line as ProductLine>::Product>>;
}

/// Sealed template operation available on every creator
pub trait TemplateOperation: Creator {
    /// Build exactly one product and run the line's logic on it
    fn template_operation(&self) -> Result<<Self::Line as ProductLine>::Output>;
}

impl<C: Creator + ?Sized> TemplateOperation for C {
    fn template_operation(&self) -> Result<<C::Line as ProductLine>::Output> {
        let product = self.factory_method()?;
        Ok(<C::Line as ProductLine>::operate(&*product))
    }
}
