//! Terminal card picker: choose two hole cards and a flop from a 4×13 grid,
//! run the simulation on a worker thread and show the results panel.

pub mod app;
pub mod controller;
pub mod ui;
