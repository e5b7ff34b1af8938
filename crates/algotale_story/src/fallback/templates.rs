//! Illustrative code listings, one per topic.
//!
//! Shown beside the story in the learning UI; JavaScript keeps them
//! runnable in the browser console for learners.

pub(super) const ARRAYS: &str = r#"// Arrays: The Foundation of Data Storage
let treasureArray = [10, 20, 30, 40, 50];

// ACCESS: O(1) - Instant retrieval by index
console.log("Element at index 2:", treasureArray[2]); // 30

// INSERT at end: O(1) - Fast push
treasureArray.push(60);

// INSERT at middle: O(n) - Must shift elements
treasureArray.splice(2, 0, 25); // Insert 25 at index 2

// DELETE: O(n) - Requires shifting
treasureArray.splice(3, 1);

// SEARCH: O(n) - Linear search
let found = treasureArray.find(x => x === 30);

// MAP / FILTER / REDUCE: Transform, select, aggregate
let doubled = treasureArray.map(x => x * 2);
let filtered = treasureArray.filter(x => x > 30);
let sum = treasureArray.reduce((acc, val) => acc + val, 0);
console.log(doubled, filtered, sum);"#;

pub(super) const STACKS: &str = r#"// Stack: LIFO (Last In, First Out)
class Stack {
  constructor() {
    this.items = [];
  }

  // PUSH: Add to top - O(1)
  push(element) {
    this.items.push(element);
  }

  // POP: Remove from top - O(1)
  pop() {
    return this.items.pop();
  }

  // PEEK: View top without removing - O(1)
  peek() {
    return this.items[this.items.length - 1];
  }

  isEmpty() {
    return this.items.length === 0;
  }
}

// USAGE EXAMPLE
const plateStack = new Stack();
plateStack.push("Plate 1");
plateStack.push("Plate 2");
plateStack.push("Plate 3");
console.log("Top plate:", plateStack.peek()); // Plate 3
plateStack.pop(); // Remove Plate 3"#;

pub(super) const QUEUES: &str = r#"// Queue: FIFO (First In, First Out)
class Queue {
  constructor() {
    this.items = {};
    this.front = 0;
    this.rear = 0;
  }

  // ENQUEUE: Add to rear - O(1)
  enqueue(element) {
    this.items[this.rear] = element;
    this.rear++;
  }

  // DEQUEUE: Remove from front - O(1)
  dequeue() {
    if (this.isEmpty()) return undefined;
    const item = this.items[this.front];
    delete this.items[this.front];
    this.front++;
    return item;
  }

  peek() {
    return this.items[this.front];
  }

  isEmpty() {
    return this.rear - this.front === 0;
  }
}

// USAGE EXAMPLE
const customerQueue = new Queue();
customerQueue.enqueue("Customer 1");
customerQueue.enqueue("Customer 2");
console.log("Next customer:", customerQueue.peek()); // Customer 1
customerQueue.dequeue(); // Serve Customer 1"#;

pub(super) const LINKED_LISTS: &str = r#"// Linked List: Dynamic Data Structure
class Node {
  constructor(data) {
    this.data = data;
    this.next = null;
  }
}

class LinkedList {
  constructor() {
    this.head = null;
    this.size = 0;
  }

  // INSERT AT BEGINNING: O(1)
  insertAtBeginning(data) {
    const newNode = new Node(data);
    newNode.next = this.head;
    this.head = newNode;
    this.size++;
  }

  // INSERT AT END: O(n)
  insertAtEnd(data) {
    const newNode = new Node(data);
    if (!this.head) {
      this.head = newNode;
    } else {
      let current = this.head;
      while (current.next) {
        current = current.next;
      }
      current.next = newNode;
    }
    this.size++;
  }

  // SEARCH: O(n)
  search(data) {
    let current = this.head;
    let index = 0;
    while (current) {
      if (current.data === data) return index;
      current = current.next;
      index++;
    }
    return -1;
  }
}

// USAGE
const list = new LinkedList();
list.insertAtEnd(10);
list.insertAtEnd(20);
list.insertAtBeginning(5);
console.log(list.search(20)); // 2"#;

pub(super) const SORTING: &str = r#"// Sorting Algorithms Comparison

// BUBBLE SORT: O(n^2) - Simple but slow
function bubbleSort(arr) {
  const n = arr.length;
  for (let i = 0; i < n - 1; i++) {
    for (let j = 0; j < n - i - 1; j++) {
      if (arr[j] > arr[j + 1]) {
        [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];
      }
    }
  }
  return arr;
}

// MERGE SORT: O(n log n) - Guaranteed!
function mergeSort(arr) {
  if (arr.length <= 1) return arr;

  const mid = Math.floor(arr.length / 2);
  const left = mergeSort(arr.slice(0, mid));
  const right = mergeSort(arr.slice(mid));

  return merge(left, right);
}

function merge(left, right) {
  const result = [];
  let i = 0, j = 0;

  while (i < left.length && j < right.length) {
    if (left[i] < right[j]) {
      result.push(left[i++]);
    } else {
      result.push(right[j++]);
    }
  }

  return result.concat(left.slice(i)).concat(right.slice(j));
}

// QUICK SORT: O(n log n) average - Fastest!
function quickSort(arr) {
  if (arr.length <= 1) return arr;

  const pivot = arr[Math.floor(arr.length / 2)];
  const left = arr.filter(x => x < pivot);
  const middle = arr.filter(x => x === pivot);
  const right = arr.filter(x => x > pivot);

  return [...quickSort(left), ...middle, ...quickSort(right)];
}

// TESTING
const unsorted = [64, 34, 25, 12, 22, 11, 90];
console.log("Merge Sort:", mergeSort([...unsorted]));
console.log("Quick Sort:", quickSort([...unsorted]));"#;

pub(super) const TREES: &str = r#"// Binary Search Tree Implementation
class TreeNode {
  constructor(data) {
    this.data = data;
    this.left = null;
    this.right = null;
  }
}

class BinarySearchTree {
  constructor() {
    this.root = null;
  }

  // INSERT: O(log n) average, O(n) worst
  insert(data) {
    const newNode = new TreeNode(data);

    if (!this.root) {
      this.root = newNode;
      return;
    }

    let current = this.root;
    while (true) {
      if (data < current.data) {
        if (!current.left) {
          current.left = newNode;
          return;
        }
        current = current.left;
      } else {
        if (!current.right) {
          current.right = newNode;
          return;
        }
        current = current.right;
      }
    }
  }

  // SEARCH: O(log n) average
  search(data) {
    let current = this.root;
    while (current) {
      if (data === current.data) return true;
      if (data < current.data) current = current.left;
      else current = current.right;
    }
    return false;
  }

  // INORDER TRAVERSAL: Left -> Root -> Right (Sorted!)
  inorder(node = this.root, result = []) {
    if (node) {
      this.inorder(node.left, result);
      result.push(node.data);
      this.inorder(node.right, result);
    }
    return result;
  }
}

// USAGE
const bst = new BinarySearchTree();
[50, 30, 70, 20, 40].forEach(val => bst.insert(val));
console.log("Inorder (sorted):", bst.inorder());"#;

pub(super) const GRAPHS: &str = r#"// Graph Implementation (Adjacency List)
class Graph {
  constructor() {
    this.adjacencyList = new Map();
  }

  // ADD VERTEX: O(1)
  addVertex(vertex) {
    if (!this.adjacencyList.has(vertex)) {
      this.adjacencyList.set(vertex, []);
    }
  }

  // ADD EDGE: O(1)
  addEdge(vertex1, vertex2) {
    this.adjacencyList.get(vertex1).push(vertex2);
    this.adjacencyList.get(vertex2).push(vertex1); // Undirected
  }

  // BFS (Breadth-First Search): O(V + E)
  bfs(start) {
    const visited = new Set();
    const queue = [start];
    const result = [];

    visited.add(start);

    while (queue.length > 0) {
      const vertex = queue.shift();
      result.push(vertex);

      for (let neighbor of this.adjacencyList.get(vertex)) {
        if (!visited.has(neighbor)) {
          visited.add(neighbor);
          queue.push(neighbor);
        }
      }
    }
    return result;
  }

  // DFS (Depth-First Search): O(V + E)
  dfs(start, visited = new Set(), result = []) {
    visited.add(start);
    result.push(start);

    for (let neighbor of this.adjacencyList.get(start)) {
      if (!visited.has(neighbor)) {
        this.dfs(neighbor, visited, result);
      }
    }
    return result;
  }
}

// USAGE: Social Network
const socialNetwork = new Graph();
['Alice', 'Bob', 'Charlie', 'Diana'].forEach(p => socialNetwork.addVertex(p));
socialNetwork.addEdge('Alice', 'Bob');
socialNetwork.addEdge('Bob', 'Diana');
console.log("BFS from Alice:", socialNetwork.bfs('Alice'));"#;

pub(super) const RECURSION: &str = r#"// Recursion: Function Calling Itself

// FACTORIAL: Classic example
function factorial(n) {
  // BASE CASE: Stop recursion
  if (n === 0 || n === 1) return 1;

  // RECURSIVE CASE: Break problem down
  return n * factorial(n - 1);
}
console.log("5! =", factorial(5)); // 120

// FIBONACCI OPTIMIZED (Memoization)
function fibMemo(n, memo = {}) {
  if (n in memo) return memo[n];
  if (n === 0) return 0;
  if (n === 1) return 1;

  memo[n] = fibMemo(n - 1, memo) + fibMemo(n - 2, memo);
  return memo[n];
}
console.log("Fast Fib(50) =", fibMemo(50));

// BINARY SEARCH (Recursive)
function binarySearch(arr, target, left = 0, right = arr.length - 1) {
  // BASE CASE: Not found
  if (left > right) return -1;

  const mid = Math.floor((left + right) / 2);

  // BASE CASE: Found
  if (arr[mid] === target) return mid;

  // RECURSIVE CASES
  if (arr[mid] > target) {
    return binarySearch(arr, target, left, mid - 1);
  }
  return binarySearch(arr, target, mid + 1, right);
}

const sorted = [1, 3, 5, 7, 9, 11, 13, 15];
console.log("Find 7:", binarySearch(sorted, 7)); // Index 3"#;
