mod codec;
mod registry;
