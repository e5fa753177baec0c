use crate::configs::tasks::{Task, TaskCollection};

/// Tasks separated by scheduling mode. Borrows from the source collection;
/// each queue preserves the collection's relative order.
#[derive(Debug)]
pub struct TaskQueues<'a> {
    pub async_tasks: Vec<&'a Task>,
    pub sequential_tasks: Vec<&'a Task>,
}

/// Splits a collection into async and sequential queues. Every task lands in
/// exactly one queue and the split itself cannot fail.
pub fn partition_tasks(collection: &TaskCollection) -> TaskQueues<'_> {
    log::debug!("partitioning {} tasks into queues", collection.tasks.len());

    let mut async_tasks = Vec::new();
    let mut sequential_tasks = Vec::new();

    for task in &collection.tasks {
        if task.is_async {
            async_tasks.push(task);
        } else {
            sequential_tasks.push(task);
        }
    }

    log::info!(
        "task queues created: {} async, {} sequential",
        async_tasks.len(),
        sequential_tasks.len()
    );

    TaskQueues {
        async_tasks,
        sequential_tasks,
    }
}
