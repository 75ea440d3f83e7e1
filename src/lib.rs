pub mod time {
    pub mod utility;
    pub mod year;
    pub mod yearerror;
}
