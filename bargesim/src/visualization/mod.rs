pub mod bargesim_figures;
