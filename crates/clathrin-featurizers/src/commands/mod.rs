pub mod featurize;
