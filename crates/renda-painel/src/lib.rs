//! # renda-painel
//!
//! View-state controllers for the Renda console, kept free of I/O so every
//! transition is directly testable:
//! - [`lista::ListController`] — filter/sort/pagination query state; emits
//!   sequence-numbered fetch tickets and discards stale responses
//! - [`formulario::EditForm`] — per-field form state with structural
//!   validation and backend error mapping
//! - [`historico::HistoricoView`] — read-only diff rendering of audit entries
//! - [`dashboard::DashboardView`] — derived aggregate/chart-ready figures
//!
//! Controllers describe the fetch to perform (a [`lista::QueryTicket`]); the
//! caller owns the HTTP client and feeds responses back in.

pub mod dashboard;
pub mod filtros;
pub mod formulario;
pub mod historico;
pub mod lista;
