mod create_pool;
mod err;
mod form;
mod instruction;
mod interface;
mod pda;
mod view;
