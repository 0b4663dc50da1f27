//! Builtin registry data
//!
//! Declaration order is significant: explicit mentions, syntax shapes, keywords, markers and
//! technical terms all stop at the first rule that matches, and category membership is
//! resolved by the first category listing a language.

use super::types::{
    CategorySpec, ExtensionSpec, GENERAL_CATEGORY, GENERAL_SPECIALIST, LanguageSpec, RegistrySpec,
    SignalRule,
};

fn language(id: &str, patterns: &[&str], confidence: f64, category: &str) -> LanguageSpec {
    LanguageSpec {
        id: id.to_string(),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
        confidence,
        category: category.to_string(),
    }
}

fn category(id: &str, languages: &[&str], frameworks: &[&str], specialist: &str) -> CategorySpec {
    CategorySpec {
        id: id.to_string(),
        languages: languages.iter().map(|l| l.to_string()).collect(),
        frameworks: frameworks.iter().map(|f| f.to_string()).collect(),
        specialist: specialist.to_string(),
    }
}

fn rules(rows: &[(&str, &str, f64)]) -> Vec<SignalRule> {
    rows.iter()
        .map(|(signal, language, confidence)| SignalRule::new(*signal, *language, *confidence))
        .collect()
}

impl RegistrySpec {
    /// The registry shipped with polyroute
    pub fn builtin() -> Self {
        Self {
            languages: builtin_languages(),
            extensions: builtin_extensions(),
            categories: builtin_categories(),
            syntax_patterns: builtin_syntax_patterns(),
            keywords: builtin_keywords(),
            project_markers: builtin_project_markers(),
            technical_terms: builtin_technical_terms(),
        }
    }
}

/// Category table, including the reserved general entry
pub fn builtin_categories() -> Vec<CategorySpec> {
    vec![
        category(
            "frontend",
            &[
                "html", "css", "javascript", "typescript", "jsx", "tsx", "vue", "angular",
                "react", "sass", "scss", "tailwind", "svelte",
            ],
            &[
                "react", "vue", "angular", "svelte", "next", "nuxt", "gatsby", "ember",
                "backbone", "jquery",
            ],
            "frontend-specialist",
        ),
        category(
            "backend",
            &[
                "node", "python", "java", "csharp", "go", "rust", "php", "ruby", "scala",
                "elixir", "kotlin", "clojure", "fsharp",
            ],
            &[
                "express", "django", "flask", "spring", "laravel", "rails", "gin", "actix",
                "phoenix", "koa", "fastapi",
            ],
            "backend-specialist",
        ),
        category(
            "mobile",
            &["kotlin", "java", "swift", "objectivec", "dart", "javascript", "csharp"],
            &["flutter", "react-native", "xamarin", "ionic", "cordova", "nativescript"],
            "mobile-specialist",
        ),
        category(
            "datascience",
            &["python", "r", "julia", "matlab", "scala", "sql"],
            &[
                "pandas", "numpy", "tensorflow", "pytorch", "spark", "jupyter", "scikit-learn",
            ],
            "data-specialist",
        ),
        category(
            "systems",
            &["c", "cpp", "rust", "zig", "assembly", "go", "fortran"],
            &["embedded", "kernel", "drivers", "microcontrollers"],
            "systems-specialist",
        ),
        category(
            "devops",
            &[
                "bash", "powershell", "yaml", "dockerfile", "terraform", "ansible", "puppet",
                "chef",
            ],
            &["kubernetes", "docker", "aws", "gcp", "azure", "jenkins", "gitlab-ci"],
            "devops-specialist",
        ),
        category(
            "functional",
            &[
                "haskell", "ocaml", "fsharp", "elm", "clojure", "erlang", "elixir", "scala",
            ],
            &["reactive", "pure-functional", "akka"],
            "functional-specialist",
        ),
        category(
            "gaming",
            &["cpp", "csharp", "lua", "gdscript", "hlsl", "glsl"],
            &["unity", "unreal", "godot", "pygame", "phaser"],
            "gaming-specialist",
        ),
        category(
            "blockchain",
            &["solidity", "vyper", "rust", "go", "javascript"],
            &["web3", "ethereum", "truffle", "hardhat"],
            "blockchain-specialist",
        ),
        category(GENERAL_CATEGORY, &[], &[], GENERAL_SPECIALIST),
    ]
}

/// Language mention patterns
pub fn builtin_languages() -> Vec<LanguageSpec> {
    vec![
        // Frontend
        language("javascript", &["javascript", r"js\b", r"node\.js", "nodejs"], 0.9, "frontend"),
        language(
            "typescript",
            &["typescript", r"ts\b", r"interface\s+\w+", r"type\s+\w+\s*="],
            0.95,
            "frontend",
        ),
        language("react", &["react", "jsx", "tsx", "usestate", "useeffect"], 0.95, "frontend"),
        language("vue", &[r"vue\.?js", "vue", "v-if", "v-for", "@click"], 0.95, "frontend"),
        language(
            "angular",
            &["angular", "@component", "@injectable", "ngfor", "ngif"],
            0.95,
            "frontend",
        ),
        language("svelte", &["svelte", r"\$:", "bind:", "on:"], 0.95, "frontend"),
        language("html", &["html5?", r"<\w+[^>]*>", r"</\w+>"], 0.9, "frontend"),
        language("css", &["css3?", "sass", "scss", "less", "tailwind"], 0.9, "frontend"),
        // Backend
        language(
            "python",
            &["python", r"py\b", r"def\s+\w+", r"import\s+\w+", "django", "flask"],
            0.95,
            "backend",
        ),
        language(
            "java",
            &[r"java\b(?!script)", r"public\s+class", r"public\s+static\s+void", "spring"],
            0.9,
            "backend",
        ),
        language(
            "csharp",
            &["c#", "csharp", r"using\s+system", r"public\s+class", r"\.net"],
            0.95,
            "backend",
        ),
        language(
            "go",
            &["golang", r"\bgo\b", r"func\s+\w+", r"package\s+\w+", r"fmt\."],
            0.9,
            "backend",
        ),
        language(
            "rust",
            &["rust", r"fn\s+\w+", r"let\s+mut", r"struct\s+\w+", r"impl\s+"],
            0.95,
            "backend",
        ),
        language("php", &["php", r"<\?php", r"\$\w+", "laravel", "symfony"], 0.95, "backend"),
        language(
            "ruby",
            &["ruby", r"def\s+\w+", r"class\s+\w+", "rails", r"gem\s+"],
            0.95,
            "backend",
        ),
        language(
            "scala",
            &["scala", r"def\s+\w+:", r"object\s+\w+", r"class\s+\w+"],
            0.95,
            "backend",
        ),
        language(
            "elixir",
            &["elixir", r"defmodule\s+\w+", r"def\s+\w+", "phoenix"],
            0.95,
            "backend",
        ),
        // Mobile
        language("kotlin", &["kotlin", r"fun\s+\w+", r"class\s+\w+", "android"], 0.95, "mobile"),
        language(
            "swift",
            &["swift", r"func\s+\w+", r"class\s+\w+", "ios", "xcode"],
            0.95,
            "mobile",
        ),
        language("dart", &["dart", "flutter", "widget", "stateless", "stateful"], 0.95, "mobile"),
        language(
            "objectivec",
            &["objective-?c", "objc", "@interface", "@implementation"],
            0.95,
            "mobile",
        ),
        // Data science
        language(
            "r",
            &[r"\br\b(?!ust)", r"library\(", r"data\.frame", "ggplot"],
            0.8,
            "datascience",
        ),
        language(
            "julia",
            &["julia", r"function\s+\w+", r"end\s*$", r"using\s+\w+"],
            0.95,
            "datascience",
        ),
        language(
            "matlab",
            &["matlab", r"function\s+\w+", r"\.m\b", "matrix"],
            0.95,
            "datascience",
        ),
        language(
            "sql",
            &["sql", r"select\s+", r"from\s+\w+", r"where\s+", "postgresql", "mysql"],
            0.9,
            "datascience",
        ),
        // Systems
        language(
            "c",
            &[r"\bc\b(?!#|ss|\+)", r"#include\s*<", r"int\s+main", "printf"],
            0.7,
            "systems",
        ),
        language(
            "cpp",
            &[r"c\+\+", "cpp", "std::", "iostream", r"class\s+\w+"],
            0.9,
            "systems",
        ),
        language("zig", &["zig", r"pub\s+fn", r"const\s+\w+"], 0.95, "systems"),
        language(
            "assembly",
            &["assembly", "asm", r"\.section", r"mov\s+", r"jmp\s+"],
            0.9,
            "systems",
        ),
        language(
            "fortran",
            &["fortran", r"program\s+\w+", r"subroutine\s+\w+"],
            0.95,
            "systems",
        ),
        // DevOps
        language("bash", &["bash", "shell", "#!/bin/bash", r"\$\{.*\}"], 0.9, "devops"),
        language("powershell", &["powershell", "ps1", r"get-\w+", r"set-\w+"], 0.95, "devops"),
        language("yaml", &["yaml", "yml", r"\w+:", r"- \w+"], 0.8, "devops"),
        language(
            "dockerfile",
            &["dockerfile", "docker", r"from\s+\w+", r"run\s+", r"copy\s+"],
            0.9,
            "devops",
        ),
        language(
            "terraform",
            &["terraform", r"tf\b", r#"resource\s+""#, r#"provider\s+""#],
            0.95,
            "devops",
        ),
        language("ansible", &["ansible", "playbook", "- name:", "hosts:"], 0.95, "devops"),
        // Functional
        language("haskell", &["haskell", r"hs\b", r"\w+\s*::", r"data\s+\w+"], 0.95, "functional"),
        language("ocaml", &["ocaml", r"let\s+\w+\s*=", r"type\s+\w+"], 0.95, "functional"),
        language(
            "fsharp",
            &["f#", "fsharp", r"let\s+\w+\s*=", r"type\s+\w+"],
            0.95,
            "functional",
        ),
        language("elm", &["elm", r"type\s+\w+", r"module\s+\w+"], 0.95, "functional"),
        language(
            "clojure",
            &["clojure", "clj", r"\(def\s+\w+", r"\(defn\s+\w+"],
            0.95,
            "functional",
        ),
        language("erlang", &["erlang", r"erl\b", r"-module\(", r"-export\("], 0.95, "functional"),
        // Gaming
        language(
            "gdscript",
            &["gdscript", "godot", r"extends\s+\w+", r"func\s+_ready"],
            0.95,
            "gaming",
        ),
        language("hlsl", &["hlsl", r"vertex\s+shader", r"fragment\s+shader"], 0.95, "gaming"),
        language("glsl", &["glsl", "gl_position", r"uniform\s+\w+"], 0.95, "gaming"),
        language(
            "lua",
            &["lua", r"function\s+\w+", r"local\s+\w+", r"end\s*$"],
            0.95,
            "gaming",
        ),
        // Blockchain
        language(
            "solidity",
            &["solidity", r"sol\b", r"contract\s+\w+", r"function\s+\w+", "ethereum"],
            0.95,
            "blockchain",
        ),
        language("vyper", &["vyper", r"vy\b", "@external", "@internal"], 0.95, "blockchain"),
        // Additional
        language("nim", &["nim", r"proc\s+\w+", r"var\s+\w+"], 0.95, "systems"),
        language(
            "crystal",
            &["crystal", r"cr\b", r"def\s+\w+", r"class\s+\w+"],
            0.95,
            "backend",
        ),
        language("reasonml", &["reason", "reasonml", r"let\s+\w+\s*="], 0.95, "functional"),
        language(
            "purescript",
            &["purescript", "purs", r"\w+\s*::", r"module\s+\w+"],
            0.95,
            "functional",
        ),
        language("coffeescript", &["coffeescript", "coffee", "->", "=>"], 0.95, "frontend"),
        language("livescript", &["livescript", r"ls\b", "<-", "->"], 0.95, "functional"),
    ]
}

/// File extension table; `.m` is deliberately listed twice and resolves to matlab
pub fn builtin_extensions() -> Vec<ExtensionSpec> {
    let rows: &[(&str, &str)] = &[
        // Frontend
        (".js", "javascript"),
        (".mjs", "javascript"),
        (".jsx", "react"),
        (".ts", "typescript"),
        (".tsx", "react"),
        (".vue", "vue"),
        (".svelte", "svelte"),
        (".html", "html"),
        (".htm", "html"),
        (".css", "css"),
        (".scss", "sass"),
        (".sass", "sass"),
        (".less", "css"),
        // Backend
        (".py", "python"),
        (".pyw", "python"),
        (".pyc", "python"),
        (".java", "java"),
        (".jar", "java"),
        (".cs", "csharp"),
        (".csx", "csharp"),
        (".go", "go"),
        (".rs", "rust"),
        (".php", "php"),
        (".phar", "php"),
        (".rb", "ruby"),
        (".rbw", "ruby"),
        (".scala", "scala"),
        (".sc", "scala"),
        (".ex", "elixir"),
        (".exs", "elixir"),
        // Mobile
        (".kt", "kotlin"),
        (".kts", "kotlin"),
        (".swift", "swift"),
        (".dart", "dart"),
        (".m", "objectivec"),
        (".mm", "objectivec"),
        // Data science
        (".r", "r"),
        (".rmd", "r"),
        (".jl", "julia"),
        (".m", "matlab"),
        (".mlx", "matlab"),
        (".sql", "sql"),
        (".psql", "sql"),
        // Systems
        (".c", "c"),
        (".h", "c"),
        (".cpp", "cpp"),
        (".cc", "cpp"),
        (".cxx", "cpp"),
        (".hpp", "cpp"),
        (".zig", "zig"),
        (".asm", "assembly"),
        (".s", "assembly"),
        (".f90", "fortran"),
        (".f95", "fortran"),
        // DevOps
        (".sh", "bash"),
        (".bash", "bash"),
        (".ps1", "powershell"),
        (".psm1", "powershell"),
        (".yml", "yaml"),
        (".yaml", "yaml"),
        (".tf", "terraform"),
        (".tfvars", "terraform"),
        (".dockerfile", "dockerfile"),
        // Functional
        (".hs", "haskell"),
        (".lhs", "haskell"),
        (".ml", "ocaml"),
        (".mli", "ocaml"),
        (".fs", "fsharp"),
        (".fsx", "fsharp"),
        (".elm", "elm"),
        (".clj", "clojure"),
        (".cljs", "clojure"),
        (".erl", "erlang"),
        (".hrl", "erlang"),
        // Gaming
        (".gd", "gdscript"),
        (".hlsl", "hlsl"),
        (".glsl", "glsl"),
        (".vert", "glsl"),
        (".frag", "glsl"),
        (".lua", "lua"),
        // Blockchain
        (".sol", "solidity"),
        (".vy", "vyper"),
        // Additional
        (".nim", "nim"),
        (".cr", "crystal"),
        (".re", "reasonml"),
        (".purs", "purescript"),
        (".coffee", "coffeescript"),
        (".ls", "livescript"),
    ];

    rows.iter()
        .map(|(extension, language)| ExtensionSpec {
            extension: extension.to_string(),
            language: language.to_string(),
        })
        .collect()
}

/// Syntax-shape regexes for code snippets, matched case-insensitively
pub fn builtin_syntax_patterns() -> Vec<SignalRule> {
    rules(&[
        // JavaScript / TypeScript
        (r"const\s+\w+\s*=|let\s+\w+\s*=|var\s+\w+\s*=", "javascript", 0.7),
        (r"interface\s+\w+|type\s+\w+\s*=", "typescript", 0.8),
        (r"<\w+[^>]*>.*</\w+>", "jsx", 0.8),
        // Python
        (r"def\s+\w+\(|class\s+\w+\(|import\s+\w+", "python", 0.8),
        (r#"if\s+__name__\s*==\s*["']__main__["']"#, "python", 0.9),
        // Go
        (r"func\s+\w+\(|package\s+\w+|import\s*\(", "go", 0.8),
        (r"fmt\.\w+|goroutine", "go", 0.9),
        // Rust
        (r"fn\s+\w+\(|struct\s+\w+|impl\s+\w+", "rust", 0.8),
        (r"let\s+mut\s+|match\s+\w+", "rust", 0.9),
        // Java
        (r"public\s+class\s+\w+|public\s+static\s+void\s+main", "java", 0.8),
        (r"@\w+|System\.out\.println", "java", 0.7),
        // C / C++
        (r"#include\s*<|int\s+main\s*\(", "c", 0.7),
        (r"std::|iostream|vector<", "cpp", 0.8),
        // PHP
        (r"<\?php|\$\w+\s*=", "php", 0.8),
        // Ruby
        (r"class\s+\w+\s*<|def\s+\w+|puts\s+", "ruby", 0.7),
    ])
}

/// Domain phrases; some map to a category id rather than a language
pub fn builtin_keywords() -> Vec<SignalRule> {
    rules(&[
        ("rest api", "backend", 0.6),
        ("microservice", "backend", 0.6),
        ("database", "backend", 0.5),
        ("frontend", "frontend", 0.7),
        ("ui component", "frontend", 0.7),
        ("mobile app", "mobile", 0.7),
        ("machine learning", "python", 0.8),
        ("data analysis", "python", 0.7),
        ("blockchain", "solidity", 0.8),
        ("smart contract", "solidity", 0.9),
    ])
}

/// Manifest files that identify a project's language
pub fn builtin_project_markers() -> Vec<SignalRule> {
    rules(&[
        ("package.json", "javascript", 0.8),
        ("requirements.txt", "python", 0.8),
        ("Cargo.toml", "rust", 0.9),
        ("go.mod", "go", 0.9),
        ("pom.xml", "java", 0.8),
        ("composer.json", "php", 0.8),
        ("Gemfile", "ruby", 0.8),
    ])
}

/// Language-idiomatic jargon
pub fn builtin_technical_terms() -> Vec<SignalRule> {
    rules(&[
        ("async/await", "javascript", 0.7),
        ("promises", "javascript", 0.6),
        ("decorators", "python", 0.7),
        ("generics", "java", 0.6),
        ("ownership", "rust", 0.8),
        ("goroutines", "go", 0.9),
        ("traits", "rust", 0.8),
        ("monads", "haskell", 0.8),
    ])
}
