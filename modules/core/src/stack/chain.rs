//! Storage layer: the owned node chain behind the stack engine.

mod chain_node;
mod linked_chain;

pub(crate) use chain_node::ChainNode;
pub(crate) use linked_chain::LinkedChain;
