pub mod mirrorfield;
