pub mod city;
pub mod results_page;
pub mod selectors;
pub mod tutor;
