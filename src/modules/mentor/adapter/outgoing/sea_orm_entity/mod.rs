pub mod mentor_applications;
