pub mod core {
    pub mod buffers;
    pub mod config;
    pub mod error;
    pub mod indices;
    pub mod runner;
    pub mod sum;
}


pub mod reporters;
