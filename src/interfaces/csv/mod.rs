pub mod spend_writer;
