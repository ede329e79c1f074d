mod align;
mod edit;
mod memmem;
mod sort;
