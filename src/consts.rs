// Centralized constants for the hierarchy and parser

// Parser: maximum tokens consumed from a single declaration source
pub const PARSER_MAX_TOKENS: usize = 200_000;

// Root of the standard Java exception tree
pub const STANDARD_ROOT: &str = "Throwable";

// Packages whose qualified names resolve to the simple names of the standard tree
pub const STANDARD_PACKAGE_PREFIXES: &[&str] = &["java.", "javax."];

// Unchecked roots of the standard Java exception tree
pub const STANDARD_UNCHECKED_ROOTS: &[&str] = &["RuntimeException", "Error"];

// Standard exception types as (name, parent). Parents always precede children.
pub const STANDARD_EXCEPTIONS: &[(&str, &str)] = &[
    ("Exception", "Throwable"),
    ("Error", "Throwable"),
    ("RuntimeException", "Exception"),
    // checked
    ("IOException", "Exception"),
    ("FileNotFoundException", "IOException"),
    ("EOFException", "IOException"),
    ("UnsupportedEncodingException", "IOException"),
    ("MalformedURLException", "IOException"),
    ("SQLException", "Exception"),
    ("InterruptedException", "Exception"),
    ("CloneNotSupportedException", "Exception"),
    ("ReflectiveOperationException", "Exception"),
    ("ClassNotFoundException", "ReflectiveOperationException"),
    ("InstantiationException", "ReflectiveOperationException"),
    ("IllegalAccessException", "ReflectiveOperationException"),
    ("NoSuchMethodException", "ReflectiveOperationException"),
    ("TimeoutException", "Exception"),
    ("ExecutionException", "Exception"),
    ("URISyntaxException", "Exception"),
    ("ParseException", "Exception"),
    // unchecked
    ("ArithmeticException", "RuntimeException"),
    ("NullPointerException", "RuntimeException"),
    ("ClassCastException", "RuntimeException"),
    ("IndexOutOfBoundsException", "RuntimeException"),
    ("ArrayIndexOutOfBoundsException", "IndexOutOfBoundsException"),
    ("StringIndexOutOfBoundsException", "IndexOutOfBoundsException"),
    ("ArrayStoreException", "RuntimeException"),
    ("NegativeArraySizeException", "RuntimeException"),
    ("IllegalArgumentException", "RuntimeException"),
    ("NumberFormatException", "IllegalArgumentException"),
    ("IllegalStateException", "RuntimeException"),
    ("UnsupportedOperationException", "RuntimeException"),
    ("NoSuchElementException", "RuntimeException"),
    ("ConcurrentModificationException", "RuntimeException"),
    ("SecurityException", "RuntimeException"),
    ("AssertionError", "Error"),
    ("VirtualMachineError", "Error"),
    ("OutOfMemoryError", "VirtualMachineError"),
    ("StackOverflowError", "VirtualMachineError"),
    ("LinkageError", "Error"),
    ("NoClassDefFoundError", "LinkageError"),
    ("ExceptionInInitializerError", "LinkageError"),
];
