//! Pure cascade-delete helpers.
//!
//! # Responsibility
//! - Split a child collection into survivors and removed ids for a set of
//!   deleted parents.
//!
//! # Invariants
//! - Helpers never touch store state; each level is a pure function from
//!   (collection, deleted parent ids) to (surviving collection, removed
//!   child ids), so every cascade level is independently testable.
//! - Cascades are unconditional: child activity state never blocks them.

use crate::model::EntityId;

/// Removes every child whose parent id is in `deleted_parents`.
///
/// Returns the surviving children in their original order and the ids of
/// the removed children, ready to feed the next cascade level.
pub(crate) fn drop_children_of<T>(
    children: Vec<T>,
    deleted_parents: &[EntityId],
    parent_id: impl Fn(&T) -> EntityId,
    child_id: impl Fn(&T) -> EntityId,
) -> (Vec<T>, Vec<EntityId>) {
    let mut survivors = Vec::with_capacity(children.len());
    let mut removed = Vec::new();

    for child in children {
        if deleted_parents.contains(&parent_id(&child)) {
            removed.push(child_id(&child));
        } else {
            survivors.push(child);
        }
    }

    (survivors, removed)
}

#[cfg(test)]
mod tests {
    use super::drop_children_of;
    use crate::model::EntityId;
    use uuid::Uuid;

    struct Child {
        id: EntityId,
        parent: EntityId,
    }

    #[test]
    fn removes_only_children_of_deleted_parents() {
        let doomed = Uuid::new_v4();
        let kept = Uuid::new_v4();
        let children = vec![
            Child {
                id: Uuid::new_v4(),
                parent: doomed,
            },
            Child {
                id: Uuid::new_v4(),
                parent: kept,
            },
            Child {
                id: Uuid::new_v4(),
                parent: doomed,
            },
        ];
        let expected_removed = [children[0].id, children[2].id];
        let expected_survivor = children[1].id;

        let (survivors, removed) =
            drop_children_of(children, &[doomed], |c| c.parent, |c| c.id);

        assert_eq!(removed, expected_removed);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].id, expected_survivor);
    }

    #[test]
    fn no_deleted_parents_is_a_no_op() {
        let children = vec![Child {
            id: Uuid::new_v4(),
            parent: Uuid::new_v4(),
        }];
        let original_id = children[0].id;

        let (survivors, removed) = drop_children_of(children, &[], |c| c.parent, |c| c.id);

        assert!(removed.is_empty());
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].id, original_id);
    }
}
