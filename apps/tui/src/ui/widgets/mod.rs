pub mod chart;
pub mod controls;
pub mod popup;
pub mod readout;
