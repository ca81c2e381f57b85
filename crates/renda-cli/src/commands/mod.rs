pub mod dispatch;
pub mod emissao;
pub mod gestor;
pub mod shared;
pub mod stats;
