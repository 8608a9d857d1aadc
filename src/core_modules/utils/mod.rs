pub mod outline_io;
