mod processable;

pub use processable::Processable;
