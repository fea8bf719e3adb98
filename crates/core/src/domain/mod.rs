pub mod order;
pub mod payment;
pub mod plan;
pub mod product;
pub mod subscription;
