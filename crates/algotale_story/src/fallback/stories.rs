//! Pre-authored fallback stories, one per topic.

pub(super) const ARRAYS: &str = r#"In a vast digital library, programmer Maya discovered the power of Arrays - the most fundamental data structure in computing.

"Arrays are like numbered storage boxes," explained the wise mentor. "Each box has an index, starting from 0. Want the 5th element? Just use arr[4]!"

Maya learned that arrays excel at RANDOM ACCESS - finding any element in O(1) constant time. Need the 1000th item? Instant! But there's a catch: inserting in the middle requires shifting all elements after it, taking O(n) time.

"When do I use arrays?" Maya asked. "Use them when you need fast lookups, know the size beforehand, or want cache-friendly memory layout," replied the mentor.

Real-world uses: storing pixels in images, implementing other data structures, managing fixed-size collections. Arrays are the building blocks of computer science!

KEY OPERATIONS:
- Access: O(1) - Lightning fast!
- Insert at end: O(1) - Quick push
- Insert at middle: O(n) - Must shift elements
- Delete: O(n) - Requires shifting
- Search: O(n) linear, O(log n) if sorted"#;

pub(super) const STACKS: &str = r#"In a busy restaurant kitchen, Chef Alex discovered the Stack principle while managing dirty plates.

"Last In, First Out!" Alex exclaimed. The stack of plates grew upward - new plates added on top (PUSH), clean plates removed from top (POP). Simple, efficient, organized!

The head chef explained: "Stacks are everywhere! Your browser's back button? A stack of pages. Undo in editors? Stack of actions. Function calls in code? Call stack!"

Alex implemented a Stack in code:
- PUSH: Add to top - O(1)
- POP: Remove from top - O(1)
- PEEK: View top without removing - O(1)
- isEmpty: Check if empty - O(1)

"Why so fast?" Alex wondered. "Because we only work with the top! No searching, no middle insertions. Pure efficiency!"

REAL-WORLD APPLICATIONS:
- Expression evaluation (calculators)
- Backtracking algorithms (maze solving)
- Syntax parsing (compilers)
- Memory management (call stack)
- Undo/Redo functionality

The LIFO principle changed how Alex thought about problem-solving forever!"#;

pub(super) const QUEUES: &str = r#"At the Space Station's docking bay, Commander Sam managed incoming ships using a Queue.

"First Come, First Served!" Sam announced. Ships joined at the REAR (enqueue), departed from the FRONT (dequeue). Fair, orderly, predictable!

"This is FIFO - First In, First Out," explained Mission Control. "Unlike stacks, queues maintain arrival order. Perfect for fairness!"

Sam's Queue implementation:
- ENQUEUE: Add to rear - O(1)
- DEQUEUE: Remove from front - O(1)
- FRONT: Check next without removing - O(1)
- isEmpty: Verify empty state - O(1)

"Where else do queues appear?" Sam asked. The list was endless:
- Print job scheduling
- CPU task management
- Breadth-First Search in graphs
- Buffer management in streaming
- Customer service lines
- Network packet routing

QUEUE VARIATIONS:
- Circular Queue: Efficient space usage
- Priority Queue: Weighted ordering
- Deque: Both ends accessible

Understanding queues meant understanding fairness in systems. Commander Sam now saw queues everywhere in the digital universe!"#;

pub(super) const LINKED_LISTS: &str = r#"In a cosmic treasure hunt, Explorer Jordan found clues scattered across planets, each pointing to the next location.

"This is a Linked List!" Jordan realized. Each node contains DATA and a POINTER to the next node. Unlike arrays with consecutive memory, linked lists scatter across the memory galaxy!

The Guide explained: "Arrays need contiguous space - like parking cars in a row. Linked lists are like a treasure hunt - each clue points to the next, scattered anywhere!"

TYPES OF LINKED LISTS:
1. Singly Linked: One-way arrows
2. Doubly Linked: Two-way arrows
3. Circular: Last points to first

OPERATIONS:
- Insert at beginning: O(1) - Just change head!
- Insert at end: O(n) - Must traverse
- Delete: O(1) if position known
- Search: O(n) - Must follow pointers
- Access by index: O(n) - No random access!

"When do I use linked lists?" Jordan asked.

"Use them when:
- Size changes frequently
- Don't need random access
- Want efficient insertions/deletions
- Memory is fragmented"

REAL APPLICATIONS:
- Music playlists
- Browser history
- Image viewers (next/prev)
- Undo functionality
- Memory management

Jordan understood: Linked lists trade instant access for flexible size!"#;

pub(super) const SORTING: &str = r#"In the Data Center of Order, Algorithm Master Taylor faced mountains of unsorted data.

"We must bring ORDER from CHAOS!" Taylor declared, studying the ancient sorting algorithms.

BUBBLE SORT - The Simplest:
Compare neighbors, swap if wrong order, repeat.
- Time: O(n^2) - Slow for large data
- Space: O(1) - In-place sorting
- Use: Teaching, small datasets

INSERTION SORT:
Build sorted list one element at a time.
- Time: O(n^2) worst, O(n) best
- Space: O(1)
- Use: Nearly sorted data, small lists

MERGE SORT - Divide & Conquer:
Split in half, recursively sort, merge.
- Time: O(n log n) - Guaranteed!
- Space: O(n) - Needs extra memory
- Use: Linked lists, stable sorting needed

QUICK SORT - The Speedster:
Pick pivot, partition, recursively sort.
- Time: O(n log n) average, O(n^2) worst
- Space: O(log n) - Recursive stack
- Use: General purpose, fastest average

"Which do I use?" Taylor asked.

The answer: "Quick Sort for speed, Merge Sort for stability, Insertion Sort for small data, Bubble Sort for learning!"

REAL APPLICATIONS:
- Database query results
- Search engines
- Priority queues
- Graphics rendering

Taylor mastered all sorting algorithms, understanding each has its perfect use case!"#;

pub(super) const TREES: &str = r#"In an ancient forest, Data Scientist Riley discovered that trees weren't just plants - they were powerful hierarchical structures!

"Binary Trees!" Riley exclaimed. Each node has at most TWO children: left and right. The top node is the ROOT, bottom nodes are LEAVES.

The Forest Keeper explained: "Trees organize data hierarchically. Like a family tree, file systems, or decision paths!"

TREE TERMINOLOGY:
- Root: Top node
- Parent/Child: Node relationships
- Height: Longest path to leaf
- Depth: Distance from root

BINARY SEARCH TREE (BST) RULES:
- Left child < Parent
- Right child > Parent
- Enables fast searching!

OPERATIONS:
- Search: O(log n) balanced, O(n) worst
- Insert: O(log n) balanced
- Delete: O(log n) balanced
- Traversal: O(n) visits all nodes

TRAVERSAL TYPES:
1. Inorder: Left -> Root -> Right (sorted)
2. Preorder: Root -> Left -> Right
3. Postorder: Left -> Right -> Root
4. Level-order: Layer by layer (BFS)

REAL-WORLD USES:
- File systems (folders/files)
- DOM in web browsers
- Expression parsing
- Decision trees in AI
- Database indexing (B-trees)

Riley marveled: "Trees bring O(log n) magic to searching!""#;

pub(super) const GRAPHS: &str = r#"At the Galactic Navigation Center, Network Engineer Casey mapped connections between star systems.

"This isn't a tree - it's a GRAPH!" Casey discovered. Nodes (vertices) connected by edges, but WITHOUT hierarchy. Some paths one-way, some two-way!

GRAPH TYPES:
- Directed: One-way streets
- Undirected: Two-way roads
- Weighted: Edges have costs
- Unweighted: All equal

REPRESENTATIONS:
1. Adjacency Matrix: 2D array
2. Adjacency List: Array of lists

GRAPH ALGORITHMS:
- BFS (Breadth-First Search): Layer by layer, uses Queue
- DFS (Depth-First Search): Deep dive first, uses Stack
- Dijkstra: Shortest path in weighted graphs
- Topological Sort: Ordering with dependencies

TIME COMPLEXITY:
- BFS/DFS: O(V + E) where V=vertices, E=edges
- Space: O(V) for visited tracking

REAL-WORLD APPLICATIONS:
- Social networks (friends)
- Maps & GPS (cities & roads)
- Web pages (links)
- Network routing
- Recommendation systems
- Dependency resolution

Casey understood: "Graphs model ANY relationship! They're the ultimate data structure for connections!"

The universe was one giant graph!"#;

pub(super) const RECURSION: &str = r#"In the Mirror Dimension, Coder Morgan discovered a magical concept: RECURSION - functions that call THEMSELVES!

"To understand recursion," the Mirror whispered, "you must first understand recursion!"

Morgan learned the TWO RULES:
1. BASE CASE: When to STOP (prevents infinite loop!)
2. RECURSIVE CASE: Break problem into smaller version

FACTORIAL EXAMPLE:
factorial(5) = 5 x factorial(4)
factorial(4) = 4 x factorial(3)
factorial(3) = 3 x factorial(2)
factorial(2) = 2 x factorial(1)
factorial(1) = 1 <- BASE CASE!

Then UNWIND: 1 -> 2 -> 6 -> 24 -> 120

RECURSION VS ITERATION:
Recursion: clean, elegant, natural for trees and graphs, but can overflow the call stack.
Iteration: fast and memory efficient, but clumsy for self-similar problems.

WHEN TO USE RECURSION:
- Tree/graph traversal
- Divide & conquer (merge sort, quicksort)
- Backtracking (sudoku, maze solving)
- Mathematical sequences
- File system navigation

OPTIMIZATION:
- Memoization: Cache results
- Tail recursion: Compiler optimization
- Convert to iteration if needed

Morgan realized: "Recursion is thinking in smaller, identical problems. Like Russian dolls - each contains a smaller version!"

The Mirror Dimension taught: Every complex problem can be broken into simpler copies of itself!"#;
