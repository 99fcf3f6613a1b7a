//! Built-in sample trees for the demo binary.

use clap::ValueEnum;

use crate::core::tree::{NodeSpec, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DemoTree {
    /// A discussion thread with nested replies.
    #[default]
    Thread,
    /// Short lettered labels, handy for checking navigation by eye.
    Letters,
}

impl DemoTree {
    pub fn build(self) -> Tree {
        match self {
            DemoTree::Thread => thread(),
            DemoTree::Letters => lettered(),
        }
    }
}

/// A comment thread: each reply is a child of the comment it answers.
pub fn thread() -> Tree {
    NodeSpec::new("admin", "Welcome to the thread!")
        .child(
            NodeSpec::new("user1", "I totally agree with this post!")
                .child(
                    NodeSpec::new("user4", "Yeah, I was thinking the same thing!")
                        .child(NodeSpec::new(
                            "user5",
                            "Not sure if I agree, but interesting take.",
                        ))
                        .child(NodeSpec::new(
                            "user6",
                            "I see your point, but have you considered XYZ?",
                        )),
                )
                .child(NodeSpec::new("user10", "Can you please elaborate?")),
        )
        .child(
            NodeSpec::new("user2", "I think there’s another perspective to consider.").child(
                NodeSpec::new("user7", "What do you mean by that?")
                    .child(NodeSpec::new("user8", "I think user2 has a good argument.")),
            ),
        )
        .child(
            NodeSpec::new("user3", "This is hilarious! 😂")
                .child(NodeSpec::new("user9", "LOL, right? This made my day. 😂")),
        )
        .build()
}

/// `root → {A → {A1 → {A11, A12, A13}, A2}, B → {B1}, C}`
pub fn lettered() -> Tree {
    NodeSpec::new("root", "")
        .child(
            NodeSpec::new("A", "")
                .child(
                    NodeSpec::new("A1", "")
                        .child(NodeSpec::new("A11", ""))
                        .child(NodeSpec::new("A12", ""))
                        .child(NodeSpec::new("A13", "")),
                )
                .child(NodeSpec::new("A2", "")),
        )
        .child(NodeSpec::new("B", "").child(NodeSpec::new("B1", "")))
        .child(NodeSpec::new("C", ""))
        .build()
}
