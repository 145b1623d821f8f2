mod amount;
mod message;
mod pda;
mod submit;
