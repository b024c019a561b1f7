pub mod dto {
    pub mod status;
}
