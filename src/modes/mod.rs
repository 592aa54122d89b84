pub mod reverse_addr;
